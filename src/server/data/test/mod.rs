mod discussion;
mod event;
mod group;
mod media;
mod membership;
mod poll;
mod shopping;
mod ticket;
mod user;
