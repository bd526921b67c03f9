pub mod hexjson;
