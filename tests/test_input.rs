use space_explorer::input::{Control, InputFrame};

#[test]
fn default_frame_is_idle() {
    assert_eq!(InputFrame::from_controls(&[], &[]), InputFrame::default());
}

#[test]
fn held_controls_do_not_fire() {
    let frame = InputFrame::from_controls(&[Control::Up, Control::Fire, Control::Boost], &[]);
    assert!(frame.up && frame.boost);
    assert!(!frame.fire);
}

#[test]
fn pressed_controls_are_edges() {
    let frame = InputFrame::from_controls(&[], &[Control::Fire, Control::Pause, Control::Left]);
    assert!(frame.fire && frame.pause);
    assert!(!frame.left);
}

#[test]
fn quit_is_an_edge_too() {
    assert!(!InputFrame::from_controls(&[Control::Quit], &[]).quit);
    assert!(InputFrame::from_controls(&[], &[Control::Quit]).quit);
}

#[test]
fn character_mapping() {
    assert_eq!(Control::from_char('w'), Some(Control::Up));
    assert_eq!(Control::from_char('D'), Some(Control::Right));
    assert_eq!(Control::from_char(' '), Some(Control::Fire));
    assert_eq!(Control::from_char('q'), Some(Control::Quit));
    assert_eq!(Control::from_char('x'), None);
}

#[test]
fn shifted_wasd_means_boost() {
    for c in ['W', 'A', 'S', 'D'] {
        assert!(Control::implies_boost(c));
    }
    assert!(!Control::implies_boost('a'));
    assert!(!Control::implies_boost('Q'));
}
