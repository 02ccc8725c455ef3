//! Rule implementations for ariabtn.
//!
//! Each function turns analysis output from `CheckContext` into issues.
//!
//! - `icon_button`: Icon-only buttons without a descriptive `aria-label`

pub mod icon_button;
