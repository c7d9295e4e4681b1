/// Create an enum of focusable form fields that can be cycled through with
/// tab/shift-tab. Focus order is declaration order, and the first variant
/// starts out focused.
#[macro_export]
macro_rules! form_fields {
    ($(#[$meta:meta])* $name:ident, $($variant:ident),+) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every field, in focus order
            const FIELDS: &'static [$name] = &[
                $($name::$variant),+
            ];

            /// Position in the focus order
            fn index(self) -> usize {
                self as usize
            }

            /// Move focus forward, wrapping around (e.g. with tab)
            pub fn next(self) -> Self {
                Self::FIELDS[(self.index() + 1) % Self::FIELDS.len()]
            }

            /// Move focus backward, wrapping around (e.g. with shift-tab)
            pub fn prev(self) -> Self {
                Self::FIELDS[(self.index() + Self::FIELDS.len() - 1) % Self::FIELDS.len()]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::FIELDS[0]
            }
        }
    };
}
