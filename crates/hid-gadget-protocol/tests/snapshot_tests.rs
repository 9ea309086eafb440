//! Snapshot tests for encoded report frames.
//!
//! These lock in wire bytes to catch accidental layout regressions.

use insta::assert_snapshot;
use kindavm_gadget_protocol::{
    ConsumerControl, DragPath, HidReport, Modifier, MouseButton, Shortcut, SystemControl,
    keymap::Keystroke, keymap::plan_text,
};

fn frames(reports: &[HidReport]) -> String {
    reports
        .iter()
        .map(HidReport::to_hex)
        .collect::<Vec<_>>()
        .join(" | ")
}

#[test]
fn test_snapshot_keyboard_shift_a() {
    let press = HidReport::keyboard(Modifier::LEFT_SHIFT, 0x04);
    assert_snapshot!(frames(&[press, press.release()]), @"01 02 00 04 00 00 00 00 00 | 01 00 00 00 00 00 00 00 00");
}

#[test]
fn test_snapshot_ctrl_alt_delete() {
    let press = HidReport::keyboard(Modifier::LEFT_CTRL | Modifier::LEFT_ALT, 0x4C);
    assert_snapshot!(press.to_hex(), @"01 05 00 4c 00 00 00 00 00");
}

#[test]
fn test_snapshot_mouse_extremes() {
    let reports = [
        HidReport::mouse(0, 127, 127, 127),
        HidReport::mouse(0, -127, -127, -127),
        HidReport::mouse(0, 200, -200, 200),
    ];
    assert_snapshot!(frames(&reports), @"04 00 7f 7f 7f | 04 00 81 81 81 | 04 00 7f 81 7f");
}

#[test]
fn test_snapshot_drag_path_ten_by_three() {
    let bits = MouseButton::Left.bits();
    let reports: Vec<HidReport> = DragPath::new(10, 3)
        .map(|(dx, dy)| HidReport::mouse(bits, dx, dy, 0))
        .collect();
    assert_snapshot!(frames(&reports), @"04 01 01 00 00 | 04 01 01 00 00 | 04 01 01 00 00 | 04 01 01 01 00 | 04 01 01 00 00 | 04 01 01 00 00 | 04 01 01 01 00 | 04 01 01 00 00 | 04 01 01 00 00 | 04 01 01 01 00");
}

#[test]
fn test_snapshot_drag_path_negative() {
    let bits = MouseButton::Right.bits();
    let reports: Vec<HidReport> = DragPath::new(-3, 5)
        .map(|(dx, dy)| HidReport::mouse(bits, dx, dy, 0))
        .collect();
    assert_snapshot!(frames(&reports), @"04 02 00 01 00 | 04 02 ff 01 00 | 04 02 00 01 00 | 04 02 ff 01 00 | 04 02 ff 01 00");
}

#[test]
fn test_snapshot_consumer_controls() {
    let reports: Vec<HidReport> = [
        ConsumerControl::VolumeUp,
        ConsumerControl::PlayPause,
        ConsumerControl::BrightnessDown,
        ConsumerControl::Refresh,
        ConsumerControl::Eject,
    ]
    .into_iter()
    .map(|control| HidReport::consumer(control.bits()))
    .collect();
    assert_snapshot!(frames(&reports), @"02 01 00 00 | 02 08 00 00 | 02 00 02 00 | 02 00 80 00 | 02 00 00 01");
}

#[test]
fn test_snapshot_system_controls() {
    let reports: Vec<HidReport> = SystemControl::ALL
        .into_iter()
        .map(HidReport::system_control)
        .collect();
    assert_snapshot!(frames(&reports), @"03 01 | 03 02 | 03 04");
}

#[test]
fn test_snapshot_shortcuts() {
    let reports: Vec<HidReport> = Shortcut::ALL
        .into_iter()
        .map(|shortcut| {
            let (modifier, keycode) = shortcut.chord();
            HidReport::keyboard(modifier, keycode)
        })
        .collect();
    assert_snapshot!(frames(&reports), @"01 01 00 1a 00 00 00 00 00 | 01 01 00 17 00 00 00 00 00 | 01 01 00 11 00 00 00 00 00 | 01 01 00 2b 00 00 00 00 00 | 01 03 00 2b 00 00 00 00 00 | 01 03 00 17 00 00 00 00 00 | 01 01 00 14 00 00 00 00 00 | 01 01 00 3d 00 00 00 00 00 | 01 04 00 3d 00 00 00 00 00 | 01 00 00 44 00 00 00 00 00");
}

#[test]
fn test_snapshot_typing_plan() {
    let plan = plan_text("Hi!\\n");
    let reports: Vec<HidReport> = plan
        .iter()
        .filter_map(|stroke| match stroke {
            Keystroke::Mapped { entry, .. } => {
                Some(HidReport::keyboard(entry.modifier(), entry.keycode))
            }
            Keystroke::Unmapped(_) => None,
        })
        .collect();
    assert_snapshot!(frames(&reports), @"01 02 00 0b 00 00 00 00 00 | 01 00 00 0c 00 00 00 00 00 | 01 02 00 1e 00 00 00 00 00 | 01 00 00 28 00 00 00 00 00");
}
