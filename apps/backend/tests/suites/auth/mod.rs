mod gate;
mod login;
