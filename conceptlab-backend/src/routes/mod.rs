// Route groups mounted by the entrypoint. The request handling for each
// group is owned by its service team and is being ported over group by
// group; until a port lands, the group's router reserves the path prefix
// and answers 501 so callers get an explicit signal instead of a 404.

pub mod admin;
pub mod auth;
pub mod chemical_equations;
pub mod concept;
pub mod concept_map;
pub mod google;
pub mod ml;
pub mod quiz;
pub mod remediation;
pub mod search;
pub mod user;
