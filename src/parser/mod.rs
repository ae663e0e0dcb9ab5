//! SQL script tokenizing and statement splitting

pub mod rules;
mod scanner;
mod script_file;
mod segment;
mod splitter;

pub use rules::{BlockEnd, LexicalRules, NestingWords, ScriptRules};
pub use script_file::{read_script, split_file, split_files, SplitFile};
pub use segment::{gaps, reassemble, OwnedSegment, Segment, SegmentKind};
pub use splitter::StatementSplitter;
