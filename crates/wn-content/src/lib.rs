//! Content-type classification for lexical resources.
//!
//! Every queryable resource is classified by a [`DataKind`] and, for all
//! kinds except [`DataKind::Sense`], a part of speech. The classification
//! carries the line ordering rule a store binary-searches with and an
//! optional charset override.
//!
//! # Built-in Content Types
//!
//! | kind      | parts of speech | ordering rule               |
//! |-----------|-----------------|-----------------------------|
//! | Index     | all four        | [`IndexLineComparator`]     |
//! | Data      | all four        | [`DataLineComparator`]      |
//! | Exception | all four        | [`ExceptionLineComparator`] |
//! | Sense     | none            | [`SenseKeyLineComparator`]  |
//!
//! Lookups by part of speech go through [`resolve_index`],
//! [`resolve_data`], and [`resolve_exception`], which are total over
//! [`Pos`](wn_types::Pos).

pub mod charset;
pub mod compare;
pub mod content_type;
pub mod error;
pub mod kind;
pub mod registry;

pub use charset::Charset;
pub use compare::{
    DataLineComparator, ExceptionLineComparator, IndexLineComparator, LineComparator,
    SenseKeyLineComparator,
};
pub use content_type::{
    resolve_data, resolve_exception, resolve_index, ContentType, ContentTypeBuilder, DATA_ADJECTIVE,
    DATA_ADVERB, DATA_NOUN, DATA_VERB, EXCEPTION_ADJECTIVE, EXCEPTION_ADVERB, EXCEPTION_NOUN,
    EXCEPTION_VERB, INDEX_ADJECTIVE, INDEX_ADVERB, INDEX_NOUN, INDEX_VERB, SENSE,
};
pub use error::{ClassificationError, ClassificationResult};
pub use kind::DataKind;
pub use registry::{values, ContentTypeRegistry};
