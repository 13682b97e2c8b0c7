pub mod redeploy_params;
pub mod redeploy_response;
pub mod redeploy_route;
