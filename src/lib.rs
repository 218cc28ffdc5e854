/*!
 * Text indexing with suffix arrays, longest common prefix (LCP) arrays and Z-arrays.
 *
 * The crate builds the classic index arrays of a text and answers the queries that are derived from them:
 *
 * - [`suffix_array`]: suffix array construction by prefix doubling, `O(n log n)`.
 * - [`lcp`]: LCP array construction with Kasai's algorithm, `O(n)`.
 * - [`z_array`]: Z-array construction, `O(n)`.
 * - [`search_pattern`]: all occurrences of a pattern, via the Z-array.
 * - [`longest_repeated_substring`]: the longest substring occurring twice, via the LCP array.
 *
 * Texts are slices of any [`Symbol`], i.e. any `Copy + Ord + Debug` type, so the same code indexes
 * bytes, `char`s of a Unicode string, integers or words. All constructions are pure functions of their
 * input: nothing is cached or shared between calls.
 *
 * The simplest way to use the crate are the free functions, which return `usize` based arrays:
 * ```
 * let text = b"banana";
 *
 * let suffix_array = textindex::build_suffix_array(text);
 * let lcp = textindex::build_lcp(text, &suffix_array).unwrap();
 * let z_array = textindex::build_z_array(text);
 *
 * assert_eq!(suffix_array, vec![5, 3, 1, 0, 4, 2]);
 * assert_eq!(lcp, vec![1, 3, 0, 0, 2]);
 * assert_eq!(z_array, vec![6, 0, 0, 0, 0, 0]);
 * ```
 *
 * The builder-like structs [`SuffixArrayConstruction`] and [`ZArrayConstruction`] additionally allow
 * choosing a smaller output element type and writing into borrowed buffers:
 * ```
 * use textindex::SuffixArrayConstruction;
 *
 * let text: Vec<char> = "mississippi".chars().collect();
 *
 * let res = SuffixArrayConstruction::for_text(&text)
 *     .in_owned_buffer32()
 *     .run()
 *     .unwrap()
 *     .lcp_construction()
 *     .run()
 *     .unwrap();
 *
 * let repeat = res.longest_repeated_substring().unwrap();
 * let repeated: String = text[repeat.range()].iter().collect();
 *
 * assert_eq!(repeated, "issi");
 * ```
 *
 * The crate emits [`tracing`] events at the `debug` and `trace` levels. It never installs a subscriber.
 */

pub mod error;
pub mod lcp;
pub mod repeats;
pub mod search;
pub mod suffix_array;
pub mod type_model;
pub mod typestate;
pub mod z_array;

mod index_buffer;
mod rank;

pub use error::IndexError;
pub use lcp::{LcpConstruction, SuffixArrayWithLcp, build_lcp};
pub use repeats::{Repeat, longest_repeated_substring};
pub use search::{PatternMatches, search_pattern};
pub use suffix_array::{SuffixArrayConstruction, SuffixArrayWithText, build_suffix_array};
pub use type_model::{OutputElement, Symbol};
pub use z_array::{ZArrayConstruction, ZArrayWithText, build_z_array};

mod sealed {
    pub trait Sealed {}
}
