use optionset::OptionSet;

mod dispatch {
  use optionset::option_set;

  option_set! {
    #[option_set(u8)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Notifications {
      enum Options {
        Email,
        Sms,
        Push,
      }
    }
  }

  option_set! {
    #[option_set(u8)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) struct Internal {
      enum Options {
        Queued,
        Sent,
      }
    }
  }
}

#[test]
fn public_members_are_visible_across_modules() {
  let mut wanted = dispatch::Notifications::new();
  wanted.insert(dispatch::Notifications::SMS);
  wanted.insert(dispatch::Notifications::PUSH);
  assert_eq!(wanted.raw_value, 0b110);
}

#[test]
fn restricted_visibility_is_mirrored_verbatim() {
  assert_eq!(dispatch::Internal::SENT.raw_value, 0b10);
  assert_eq!(dispatch::Internal::new().raw_value, 0);
}
