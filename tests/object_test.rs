mod common;
use common::*;
use squiggly::lang::ErrorCode;

#[test]
fn members_alias_the_object_and_defaults_hold() {
    let r = run(
        ":VARS: {
    OBJECT player
}
:START: {
    player.x = 12.5
    player.width = 10
}
:UPDATE: {}",
        0,
    );
    assert_eq!(float(&r, "player.x"), 12.5);
    assert_eq!(float(&r, "player.width"), 10.0);
    // new objects are pink
    assert_eq!(int(&r, "player.color_r"), 255);
    assert_eq!(int(&r, "player.color_g"), 0);
    assert_eq!(int(&r, "player.color_b"), 255);
}

#[test]
fn objects_pass_to_functions_by_reference() {
    let r = run(
        ":VARS: {
    OBJECT player
}
setup(OBJECT o) {
    o.x = 30
    o.setColor(1, 2, 3)
}
:START: {
    setup(player)
}
:UPDATE: {}",
        0,
    );
    assert_eq!(float(&r, "player.x"), 30.0);
    assert_eq!(int(&r, "player.color_g"), 2);
}

#[test]
fn test_collision_sets_the_shared_flag() {
    let r = run(
        ":VARS: {
    OBJECT a
    OBJECT b
    bool first = false
}
:START: {
    a.width = 10
    a.height = 10
    b.width = 10
    b.height = 10
    b.x = 5
    a.testCollision(b)
    first = $COLLISION
    b.x = 50
    a.testCollision(b)
}
:UPDATE: {}",
        0,
    );
    assert!(boolean(&r, "first"));
    assert!(!boolean(&r, "$COLLISION"));
}

#[test]
fn an_object_touches_itself() {
    let r = run(
        ":VARS: {
    OBJECT a
}
:START: {
    a.testCollision(a)
}
:UPDATE: {}",
        0,
    );
    assert!(boolean(&r, "$COLLISION"));
}

#[test]
fn walls_block_and_release_movement() {
    let src_head = ":VARS: {
    OBJECT player
    OBJECT wall
}
:START: {
    player.width = 10
    player.height = 10
    wall.width = 10
    wall.height = 10
    wall.x = 12
    player.addWall(wall, true)
    player.move(5, 0, true)
";
    let r = run(&format!("{}}}\n:UPDATE: {{}}", src_head), 0);
    // walked back in tenth-steps until clear of the wall
    assert!((float(&r, "player.x") - 1.5).abs() < 1e-4);

    let freed = format!(
        "{}    player.addWall(wall, false)\n    player.move(5, 0, true)\n}}\n:UPDATE: {{}}",
        src_head
    );
    let r = run(&freed, 0);
    assert!((float(&r, "player.x") - 6.5).abs() < 1e-4);
}

#[test]
fn plain_moves_ignore_walls() {
    let r = run(
        ":VARS: {
    OBJECT player
    OBJECT wall
}
:START: {
    player.width = 10
    player.height = 10
    wall.width = 10
    wall.height = 10
    wall.x = 12
    player.addWall(wall, true)
    player.move(5, 0, false)
}
:UPDATE: {}",
        0,
    );
    assert_eq!(float(&r, "player.x"), 5.0);
}

#[test]
fn unknown_method_is_an_object_error() {
    let err = try_run(
        ":VARS: {
    OBJECT player
}
:START: {
    player.fly()
}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Object);
}

#[test]
fn unknown_member_is_an_object_error() {
    let err = try_run(
        ":VARS: {
    OBJECT player
}
:START: {
    player.nope = 1
}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Object);
}

#[test]
fn methods_require_an_object_receiver() {
    let err = try_run(
        ":VARS: {
    int x
}
:START: {
    x.move(1, 2, false)
}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Runner);
}

#[test]
fn draw_rasterizes_into_the_frame() {
    let r = run(
        ":VARS: {
    OBJECT player
}
:START: {}
:UPDATE: {
    player.width = 10
    player.height = 10
    player.x = 20
    player.y = 20
    player.setColor(10, 20, 30)
    player.draw()
}",
        1,
    );
    assert_eq!(r.screen().pixel(25, 25), [10, 20, 30]);
    assert_eq!(r.screen().pixel(50, 50), [0, 0, 0]);
}
