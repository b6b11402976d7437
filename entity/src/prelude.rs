pub use super::carpool_offer::Entity as CarpoolOffer;
pub use super::discussion_thread::Entity as DiscussionThread;
pub use super::event::Entity as Event;
pub use super::event_organizer::Entity as EventOrganizer;
pub use super::event_participant::Entity as EventParticipant;
pub use super::group::Entity as Group;
pub use super::group_membership::Entity as GroupMembership;
pub use super::message::Entity as Message;
pub use super::photo::Entity as Photo;
pub use super::photo_album::Entity as PhotoAlbum;
pub use super::photo_comment::Entity as PhotoComment;
pub use super::poll::Entity as Poll;
pub use super::poll_option::Entity as PollOption;
pub use super::poll_question::Entity as PollQuestion;
pub use super::poll_vote::Entity as PollVote;
pub use super::shopping_item::Entity as ShoppingItem;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_type::Entity as TicketType;
pub use super::user::Entity as User;
