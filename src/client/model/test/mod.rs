mod session;
mod settings;
