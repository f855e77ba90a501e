// Resume persistence, preview and export endpoints.
// Every read path goes through the store; preview and export never write back.

pub mod handlers;
