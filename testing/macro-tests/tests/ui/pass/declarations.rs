use macro_utils::prelude::*;

mod inner {
    use macro_utils::prelude::*;

    define_local_enum!(pub(crate) State, OPEN, CLOSED);

    pub(crate) fn name(state: State) -> &'static str {
        state_to_string(state)
    }
}

define_struct!(#[derive(Debug)] Pair, u8, left, Option<u8>, right);

define_enum!(#[derive(Default)] Answer, NO, YES);

fn main() {
    let pair = Pair {
        left: 1,
        right: None,
    };
    assert_eq!(pair.left, 1);
    assert!(pair.right.is_none());

    assert_eq!(inner::name(inner::State::CLOSED), "CLOSED");
    assert_eq!(Answer::default(), Answer::Answer_INVALID);
    assert_eq!(tostring!(Answer), "Answer");
    assert_eq!(p_or_null(None), "NULL");
}
