pub mod completer;
pub mod invoker;
pub mod openai;
pub mod thinking;
