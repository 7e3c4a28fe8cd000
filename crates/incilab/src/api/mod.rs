//! API modules
//!
//! Thin declarative wrappers: each method builds one request descriptor
//! and delegates to the pipeline. The resolved value is always the whole
//! response envelope. Listing endpoints take 1-based `page`/`size`;
//! optional parameters are omitted from the query when `None`.

mod brand;
mod favorite;
mod history;
mod ingredient;
mod ingredient_review;
mod knowledge;
mod product;
mod product_review;
mod review_post;
