//! Conversion of arbitrary values into attribute strings.

/// A value that can be stored as an HTML attribute value.
///
/// Numbers are stringified, and `None` becomes the empty string so that the
/// attribute is still rendered (as `name=""`) rather than dropped.
pub trait AttributeValue {
    fn into_attribute_value(self) -> String;
}

impl AttributeValue for String {
    fn into_attribute_value(self) -> String {
        self
    }
}

impl AttributeValue for &str {
    fn into_attribute_value(self) -> String {
        self.to_string()
    }
}

impl AttributeValue for &String {
    fn into_attribute_value(self) -> String {
        self.clone()
    }
}

impl<T: AttributeValue> AttributeValue for Option<T> {
    fn into_attribute_value(self) -> String {
        self.map(AttributeValue::into_attribute_value)
            .unwrap_or_default()
    }
}

macro_rules! display_attribute_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AttributeValue for $ty {
                fn into_attribute_value(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_attribute_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_stringified() {
        assert_eq!(3i32.into_attribute_value(), "3");
        assert_eq!(12u64.into_attribute_value(), "12");
        assert_eq!(1.5f64.into_attribute_value(), "1.5");
    }

    #[test]
    fn test_none_is_empty_string() {
        assert_eq!(None::<&str>.into_attribute_value(), "");
        assert_eq!(Some("x").into_attribute_value(), "x");
        assert_eq!(Some(7i64).into_attribute_value(), "7");
    }
}
