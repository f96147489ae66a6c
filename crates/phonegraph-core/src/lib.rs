//! Phonegraph Core - phone numbers and call records
//!
//! This crate turns raw text into validated input for the call graph.
//! It knows the `ddd-ddd-dddd` number format and the two-numbers-per-line
//! record layout, and nothing about graphs.
//!
//! # Example
//!
//! ```
//! use phonegraph_core::{CallRecord, RecordReader};
//! use std::io::Cursor;
//!
//! let input = "555-111-2222 555-333-4444\nbogus line here\n";
//! let mut good = 0;
//! let mut bad = 0;
//! for (_line, result) in RecordReader::new(Cursor::new(input)) {
//!     match result {
//!         Ok(_record) => good += 1,
//!         Err(_) => bad += 1,
//!     }
//! }
//! assert_eq!((good, bad), (1, 1));
//!
//! let record = CallRecord::parse_line("555-111-2222 555-333-4444").unwrap();
//! assert_eq!(record.caller.as_str(), "555-111-2222");
//! ```

pub mod error;
mod phone;
mod reader;
mod record;

pub use error::{PhoneNumberError, RecordError};
pub use phone::{PhoneNumber, PHONE_NUMBER_LEN};
pub use reader::RecordReader;
pub use record::CallRecord;
