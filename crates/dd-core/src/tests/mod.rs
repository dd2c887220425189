mod naming;
mod role;
