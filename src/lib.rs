//! Sets over ordered or hashable elements, backed by three interchangeable
//! structures, and a spelling checker that works with any of them.
//!
//! - [`BstSet`]: an unbalanced binary search tree.
//! - [`AvlSet`]: a height-balanced (AVL) binary search tree.
//! - [`HashSet`]: a separately-chained hash table that doubles when its load
//!   factor exceeds 4/5.
//!
//! All three implement [`Set`], which is what [`WordChecker`] borrows to answer
//! membership queries and to propose corrections for misspelled words.
//!
//! None of the structures support removal of single elements.
//!
//! ```
//! use spellset::{HashSet, Set, WordChecker};
//!
//! let mut words: HashSet<String> = HashSet::default();
//! for word in ["HELLO", "HELP", "WORLD"] {
//!     words.add(word.to_string());
//! }
//!
//! let checker = WordChecker::new(&words);
//! assert!(checker.word_exists("WORLD"));
//! assert_eq!(checker.find_suggestions("HELO"), ["HELP", "HELLO"]);
//! ```

mod avl;
mod bst;
mod error;
mod hash;
mod set;
mod word_checker;

pub use avl::AvlSet;
pub use bst::BstSet;
pub use error::ZeroCapacity;
pub use hash::{std_hash, HashFn, HashSet, DEFAULT_CAPACITY};
pub use set::Set;
pub use word_checker::{WordChecker, DEFAULT_ALPHABET};
