// Game model and store
pub mod core;

// Error taxonomy and HTTP mapping
pub mod error;

// Environment configuration
pub mod config;

// Middleware
pub mod middleware;

// Services (business logic)
pub mod services;

// API models (requests/responses)
pub mod models;

// HTTP routes
pub mod routes;

// Application state
pub mod state;
