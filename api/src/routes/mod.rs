pub mod redeploy;
