//! # TMDb API Module
//!
//! Read access to the two TMDb endpoints the graph builder needs:
//!
//! - `/movie/{id}/credits`: the cast of a movie
//! - `/person/{id}/movie_credits`: the movies a person appeared in
//!
//! [`MovieApi`] is the seam between the builder and the network, so the
//! crawl can be driven by an in-memory stub.
//!
//! ## Example
//!
//! ```
//! use coactor_graph::api::{CastMember, filter_cast};
//!
//! let cast = vec![
//!     CastMember { id: Some("2".into()), order: Some(1), ..Default::default() },
//!     CastMember { id: Some("1".into()), order: Some(0), ..Default::default() },
//!     CastMember { id: Some("9".into()), order: Some(9), ..Default::default() },
//! ];
//!
//! let top = filter_cast(cast, 5, &[]);
//! let ids: Vec<_> = top.iter().filter_map(|m| m.id.as_deref()).collect();
//! assert_eq!(ids, ["1", "2"]);
//! ```

mod client;
mod filters;
mod retry;
mod types;

pub use client::{ApiConfig, TmdbClient};
pub use filters::{filter_cast, filter_credits};
pub use retry::retry_with_delays;
pub use types::{CastMember, MovieCredit, cast_entries, id_from_value};

/// Source of cast listings and person credits
pub trait MovieApi {
    /// Top-billed cast of a movie, at most `limit` members, sorted by
    /// billing order, without the ids in `exclude_ids`
    fn get_movie_cast(&self, movie_id: &str, limit: usize, exclude_ids: &[String]) -> Vec<CastMember>;

    /// Movies a person appeared in with a release date inside the window
    fn get_movie_credits_for_person(
        &self,
        person_id: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Vec<MovieCredit>;
}
