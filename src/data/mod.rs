/// Data layer: parsing, classification, and output.
///
/// Architecture:
/// ```text
///   input .txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  scan tokens → NumberList (malformed lines dropped)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  natural-square predicate → Vec<SquareResult>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  one integer per line → <dir of input>/<name>.txt
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
