// API module - 后端 HTTP 接口客户端

pub mod client;
