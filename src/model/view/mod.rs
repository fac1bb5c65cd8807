pub mod view_request;
pub mod view_request_list;
