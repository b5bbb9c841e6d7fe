use macro_utils::prelude::*;
use std::collections::HashMap;

//
// Point
//

define_struct!(#[derive(Clone, Debug, Default, PartialEq, Eq)] pub Point, i32, x, i32, y);

//
// Buffer
//

define_struct!(#[derive(Debug)] pub Buffer, *const u8, data, usize, len);

//
// Index
// generic field types carry their own commas
//

define_struct!(
    #[derive(Debug, Default)]
    pub Index,
    HashMap<String, u32>, by_name,
    Vec<(u8, u8)>, spans,
);

//
// TESTS
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_declared_in_list_order() {
        let point = Point { x: 1, y: 2 };

        assert_eq!(format!("{point:?}"), "Point { x: 1, y: 2 }");
        assert_eq!(Point::default(), Point { x: 0, y: 0 });
    }

    #[test]
    fn pointer_fields_keep_their_type() {
        let bytes = [7u8; 4];
        let buffer = Buffer {
            data: bytes.as_ptr(),
            len: bytes.len(),
        };

        assert_eq!(buffer.len, 4);
        assert_eq!(buffer.data, bytes.as_ptr());
    }

    #[test]
    fn generic_fields_are_usable() {
        let mut index = Index::default();
        index.by_name.insert("a".to_string(), 1);
        index.spans.push((0, 3));

        assert_eq!(index.by_name["a"], 1);
        assert_eq!(index.spans, [(0, 3)]);
    }
}
