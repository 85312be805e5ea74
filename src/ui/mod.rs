/// Yew components mounted into the server-rendered page
pub mod components;
pub mod results;
pub mod search_box;
