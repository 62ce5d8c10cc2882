mod object_builder_tests;
mod schema_proxy_tests;
mod security_requirement_tests;
