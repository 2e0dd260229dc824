pub mod functions;
pub mod routes;
