mod command;
mod form;
mod session;
mod transcript;
