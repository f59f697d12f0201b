//! Helper macro for declaring domain port error enums.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor whose
//! parameters accept anything convertible into the field types.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for the generated constructors.

    define_port_error! {
        pub enum SamplePortError {
            Transport { message: String } => "transport: {message}",
            Status { status: u16 } => "status {status}",
            Mixed { message: String, status: u16 } => "{message} ({status})",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SamplePortError::transport("refused");
        assert_eq!(err.to_string(), "transport: refused");
    }

    #[test]
    fn constructors_preserve_numeric_fields() {
        let err = SamplePortError::status(503_u16);
        assert_eq!(err, SamplePortError::Status { status: 503 });
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = SamplePortError::mixed("bad gateway", 502_u16);
        assert_eq!(err.to_string(), "bad gateway (502)");
    }
}
