pub mod http_auth_provider;
