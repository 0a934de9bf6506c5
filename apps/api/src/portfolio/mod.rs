// Query/Presentation layer: read-only payloads for the /api/v1 routes.
// Lists always come back sorted by `order`; age and experience are derived
// from the clock on every request and never cached.

pub mod handlers;
pub mod queries;
