//! Domain entities - core business objects

mod group;
mod member;
mod message;
mod template;

pub use group::Group;
pub use member::{Member, MemberWithGroup};
pub use message::{
    DeliveryStatus, Message, MessageGroupLink, MessageRecipientLink, MessageStatus,
    StatusParseError, SMS_UNIT_LEN,
};
pub use template::SmsTemplate;
