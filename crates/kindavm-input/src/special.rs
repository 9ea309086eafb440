//! Dispatch of named special keys to the matching encoder

use kindavm_gadget_protocol::{Modifier, SpecialAction};
use kindavm_hid_common::{HidCommonResult, ReportSink};

use crate::{consumer, keyboard, system};

pub fn perform<S: ReportSink + ?Sized>(sink: &mut S, action: SpecialAction) -> HidCommonResult<()> {
    match action {
        SpecialAction::Key(key) => keyboard::send_key(sink, key.keycode(), Modifier::NONE),
        SpecialAction::Consumer(control) => consumer::send_control(sink, control),
        SpecialAction::System(control) => system::send_control(sink, control),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindavm_hid_common::hid_traits::mock::RecordingSink;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_perform_by_name() -> TestResult {
        let mut sink = RecordingSink::new();
        for name in ["F5", "volume-up", "wake"] {
            perform(&mut sink, name.parse()?)?;
        }
        assert_eq!(
            sink.frames(),
            vec![
                vec![0x01, 0, 0, 0x3E, 0, 0, 0, 0, 0],
                vec![0x01, 0, 0, 0, 0, 0, 0, 0, 0],
                vec![0x02, 0x01, 0, 0],
                vec![0x02, 0, 0, 0],
                vec![0x03, 0x04],
                vec![0x03, 0x00],
            ]
        );
        Ok(())
    }

    #[test]
    fn test_every_name_sends_a_pair() -> TestResult {
        for name in SpecialAction::names() {
            let mut sink = RecordingSink::new();
            perform(&mut sink, name.parse()?)?;
            assert_eq!(sink.reports().len(), 2, "{name}");
            assert!(sink.reports()[1].is_release());
        }
        Ok(())
    }
}
