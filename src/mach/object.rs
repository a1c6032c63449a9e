use super::convert::convert_to_variable;
use super::runtime::Runtime;
use super::var::{Payload, VarType, Variable};
use crate::error;
use crate::gfx::{physics, Shape, Sprite};
use crate::lang::Error;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Result<T> = std::result::Result<T, Error>;

/// Number of equal back-steps tried when a collision-checked move ends up
/// inside a wall.
pub const OBJ_COL_RESP_SEGMENTS: u32 = 10;

/// ## Built-in Object
///
/// A drawable, collidable rectangle-ish entity. Its geometry and color live
/// in ordinary [`Variable`] cells so that script-side member access
/// (`player.x`) aliases the same storage the object's methods use. Walls
/// are held weakly: a wall that goes out of scope simply stops blocking.
pub struct Object {
    id: u64,
    x: Variable,
    y: Variable,
    width: Variable,
    height: Variable,
    rotation: Variable,
    color_r: Variable,
    color_g: Variable,
    color_b: Variable,
    shape: Shape,
    walls: Vec<(u64, Weak<RefCell<Payload>>)>,
    collision_flag: Rc<RefCell<Payload>>,
}

impl std::fmt::Debug for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Object {{ id: {}, walls: {} }}", self.id, self.walls.len())
    }
}

fn field(name: &str, ty: VarType) -> Variable {
    let payload = match ty {
        VarType::Integer => Payload::Integer(0),
        _ => Payload::Float(0.0),
    };
    Variable::new(name, ty, payload)
}

impl Object {
    /// Fresh object at the origin: pink, rectangular, 0 by 0.
    pub fn new(id: u64, collision_flag: Rc<RefCell<Payload>>) -> Object {
        let object = Object {
            id,
            x: field("x", VarType::Float),
            y: field("y", VarType::Float),
            width: field("width", VarType::Float),
            height: field("height", VarType::Float),
            rotation: field("rotation", VarType::Float),
            color_r: field("color_r", VarType::Integer),
            color_g: field("color_g", VarType::Integer),
            color_b: field("color_b", VarType::Integer),
            shape: Shape::Rect,
            walls: Vec::new(),
            collision_flag,
        };
        object.set_color(255, 0, 255);
        object
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Member lookup for `name.member` expressions. The returned handle
    /// shares the field's cell, so assigning through it moves the object.
    pub fn fetch_field(&self, name: &str) -> Result<Variable> {
        let var = match name {
            "x" => &self.x,
            "y" => &self.y,
            "width" => &self.width,
            "height" => &self.height,
            "rotation" => &self.rotation,
            "color_r" => &self.color_r,
            "color_g" => &self.color_g,
            "color_b" => &self.color_b,
            _ => {
                return Err(error!(Object; format!("OBJECT VARIABLE '{}' NOT FOUND", name)));
            }
        };
        Ok(var.clone())
    }

    fn float(var: &Variable) -> f32 {
        match &*var.cell.borrow() {
            Payload::Float(v) => *v,
            _ => 0.0,
        }
    }

    fn int(var: &Variable) -> i32 {
        match &*var.cell.borrow() {
            Payload::Integer(v) => *v,
            _ => 0,
        }
    }

    pub fn sprite(&self) -> Sprite {
        Sprite {
            x: Object::float(&self.x),
            y: Object::float(&self.y),
            width: Object::float(&self.width),
            height: Object::float(&self.height),
            rotation: Object::float(&self.rotation),
            color: [
                Object::int(&self.color_r) as u8,
                Object::int(&self.color_g) as u8,
                Object::int(&self.color_b) as u8,
            ],
            shape: self.shape,
        }
    }

    pub fn set_color(&self, r: i32, g: i32, b: i32) {
        *self.color_r.cell.borrow_mut() = Payload::Integer(r);
        *self.color_g.cell.borrow_mut() = Payload::Integer(g);
        *self.color_b.cell.borrow_mut() = Payload::Integer(b);
    }

    fn set_pos(&self, x: f32, y: f32) {
        *self.x.cell.borrow_mut() = Payload::Float(x);
        *self.y.cell.borrow_mut() = Payload::Float(y);
    }

    pub fn is_touching(&self, other: &Object) -> bool {
        physics::rects_overlap(&self.sprite().bounds(), &other.sprite().bounds())
    }

    /// Registers or removes `other` as a wall, identified by object id.
    pub fn add_wall(&mut self, id: u64, cell: Weak<RefCell<Payload>>, add: bool) {
        self.walls.retain(|(wall_id, _)| *wall_id != id);
        if add {
            self.walls.push((id, cell));
        }
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Would this object, centered as if at top-left `(x, y)`, overlap any
    /// live wall?
    fn blocked_at(&self, x: f32, y: f32) -> bool {
        let mut probe = self.sprite();
        probe.x = x;
        probe.y = y;
        let probe = probe.bounds();
        for (_, wall) in &self.walls {
            let wall = match wall.upgrade() {
                Some(cell) => cell,
                None => continue,
            };
            let wall = wall.borrow();
            if let Payload::Object(wall) = &*wall {
                if physics::rects_overlap(&probe, &wall.sprite().bounds()) {
                    return true;
                }
            }
        }
        false
    }

    /// Moves by `(dx, dy)`. With `collide` set, the destination is walked
    /// back toward the start in equal segments until it clears every wall;
    /// if no segment clears, the object stays put.
    pub fn move_by(&mut self, dx: f32, dy: f32, collide: bool) {
        let (ox, oy) = (Object::float(&self.x), Object::float(&self.y));
        let (mut nx, mut ny) = (ox + dx, oy + dy);
        if collide {
            let step_x = dx / OBJ_COL_RESP_SEGMENTS as f32;
            let step_y = dy / OBJ_COL_RESP_SEGMENTS as f32;
            let mut blocked = false;
            for _ in 0..=OBJ_COL_RESP_SEGMENTS {
                blocked = self.blocked_at(nx, ny);
                if !blocked {
                    break;
                }
                nx -= step_x;
                ny -= step_y;
            }
            if blocked {
                nx = ox;
                ny = oy;
            }
        }
        self.set_pos(nx, ny);
    }
}

fn expect_args(name: &str, args: &[String], count: usize) -> Result<()> {
    if args.len() != count {
        return Err(error!(Object;
            format!("'{}' EXPECTED {} ARGUMENTS, GOT {}", name, count, args.len())));
    }
    Ok(())
}

fn with_object<T, F: FnOnce(&mut Object) -> T>(var: &Variable, f: F) -> Result<T> {
    match &mut *var.cell.borrow_mut() {
        Payload::Object(object) => Ok(f(object)),
        _ => Err(error!(Object; format!("VARIABLE '{}' DOES NOT HOLD AN OBJECT", var.name))),
    }
}

/// Method dispatch for `name.method(args)` statements. Arguments are
/// evaluated before the object is borrowed so an argument expression may
/// freely read the object's own members.
pub fn call_function(var: &Variable, name: &str, args: &[String], rt: &mut Runtime) -> Result<()> {
    match name {
        "draw" => {
            expect_args(name, args, 0)?;
            let sprite = with_object(var, |object| object.sprite())?;
            rt.screen_mut().draw_sprite(&sprite);
        }
        "testCollision" => {
            expect_args(name, args, 1)?;
            let other = rt.fetch_object(&args[0])?;
            let touching = if Rc::ptr_eq(&var.cell, &other.cell) {
                true
            } else {
                let other = other.cell.borrow();
                match &*other {
                    Payload::Object(other) => with_object(var, |object| object.is_touching(other))?,
                    _ => {
                        return Err(error!(Object;
                            format!("VARIABLE '{}' DOES NOT HOLD AN OBJECT", args[0])));
                    }
                }
            };
            let flag = with_object(var, |object| object.collision_flag.clone())?;
            *flag.borrow_mut() = Payload::Bool(touching);
        }
        "move" => {
            expect_args(name, args, 3)?;
            let dx = convert_to_variable(rt, &args[0], VarType::Float)?.as_float()?;
            let dy = convert_to_variable(rt, &args[1], VarType::Float)?.as_float()?;
            let collide = convert_to_variable(rt, &args[2], VarType::Bool)?.as_bool()?;
            with_object(var, |object| object.move_by(dx, dy, collide))?;
        }
        "addWall" => {
            expect_args(name, args, 2)?;
            let other = rt.fetch_object(&args[0])?;
            if Rc::ptr_eq(&var.cell, &other.cell) {
                return Err(error!(Object; "AN OBJECT CANNOT BE ITS OWN WALL"));
            }
            let add = convert_to_variable(rt, &args[1], VarType::Bool)?.as_bool()?;
            let id = match &*other.cell.borrow() {
                Payload::Object(other) => other.id(),
                _ => {
                    return Err(error!(Object;
                        format!("VARIABLE '{}' DOES NOT HOLD AN OBJECT", other.name)));
                }
            };
            let weak = Rc::downgrade(&other.cell);
            with_object(var, |object| object.add_wall(id, weak, add))?;
        }
        "setShape" => {
            expect_args(name, args, 1)?;
            let shape = convert_to_variable(rt, &args[0], VarType::String)?.as_string()?;
            let shape = match shape.to_ascii_uppercase().as_str() {
                "RECT" => Shape::Rect,
                "ELLIPSE" => Shape::Ellipse,
                "TRIANGLE" => Shape::Triangle,
                _ => {
                    return Err(error!(Object; format!("UNKNOWN SHAPE '{}'", shape)));
                }
            };
            with_object(var, |object| object.shape = shape)?;
        }
        "setColor" => {
            expect_args(name, args, 3)?;
            let r = convert_to_variable(rt, &args[0], VarType::Integer)?.as_int()?;
            let g = convert_to_variable(rt, &args[1], VarType::Integer)?.as_int()?;
            let b = convert_to_variable(rt, &args[2], VarType::Integer)?.as_int()?;
            with_object(var, |object| object.set_color(r, g, b))?;
        }
        _ => {
            return Err(error!(Object; format!("FUNCTION NAME '{}' DOES NOT EXIST", name)));
        }
    }
    Ok(())
}
