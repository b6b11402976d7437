mod auth;
mod discussion;
mod event;
mod group;
mod poll;
mod shopping;
mod ticket;
