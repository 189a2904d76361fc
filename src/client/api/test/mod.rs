mod endpoint;
mod interceptor;
