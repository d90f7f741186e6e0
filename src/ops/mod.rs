pub mod backup;
pub mod doc_ops;
pub mod view;
