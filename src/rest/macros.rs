/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

macro_rules! impl_response_status {
    ($($t:ty),+ $(,)?) => {$(
        impl crate::rest::response::ResponseStatus for $t {
            fn stat(&self) -> crate::rest::response::Stat {
                self.stat
            }

            fn err(&self) -> Option<&crate::rest::response::ApiError> {
                self.err.as_ref()
            }
        }
    )+};
}

pub(crate) use impl_response_status;
