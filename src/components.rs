//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the page
//! types (home, blog, publications, travel): the document wrapper, the
//! navigation bar and the footer.

pub mod footer;
pub mod layout;
pub mod nav;
