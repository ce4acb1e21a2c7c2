// resplice
// Match scanning and template substitution on top of pluggable match engines

#[cfg(test)]
mod test;

pub mod engine;
pub mod error;
pub mod limits;
pub mod names;
pub mod options;
pub mod record;
pub mod regexp;
pub mod replace;
pub mod scan;
pub mod template;

pub use engine::lua::LuaMatcher;
pub use engine::regex::RegexMatcher;
pub use engine::{MatchEngine, Matcher};
pub use error::{CompileError, Error, MatchError, RecordError};
pub use names::NameTable;
pub use options::{CompileOptions, ExecOptions, Limit};
pub use record::{MatchRecord, Span};
pub use regexp::{Regexp, is_match};
pub use replace::{assemble, literal_policy, template_policy, transform_policy};
pub use scan::{ScanState, Scanner, scan_all};
pub use template::{Reference, Template, expand};
