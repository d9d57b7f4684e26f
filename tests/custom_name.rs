use optionset::{OptionSet, option_set};

option_set! {
  #[option_set(u8, options_name = "Permissions")]
  #[derive(Clone, Copy, Debug, PartialEq, Eq)]
  pub struct FileMode {
    enum Permissions {
      Read,
      Write,
      Execute,
    }
  }
}

option_set! {
  #[option_set(u8)]
  #[derive(Clone, Copy, Debug, PartialEq, Eq)]
  struct Duplicated {
    enum Options {
      First,
      Second,
    }
    enum Options {
      Third,
    }
  }
}

#[test]
fn the_label_selects_the_enumeration() {
  let mode = FileMode::READ.union(FileMode::EXECUTE);
  assert_eq!(mode.raw_value, 0b101);
  assert!(!mode.contains(FileMode::WRITE));
}

#[test]
fn first_matching_enumeration_wins() {
  // Constants come from the first `Options` in declaration order; a second
  // enumeration with the same name contributes nothing.
  assert_eq!(Duplicated::FIRST.raw_value, 1);
  assert_eq!(Duplicated::SECOND.raw_value, 2);
}
