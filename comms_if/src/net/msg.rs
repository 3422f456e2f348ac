//! # Stream message framing
//!
//! Every message on a PUB/SUB stream is a single string of the form `"<topic> <json>"`. The topic
//! lets subscribers filter with `set_subscribe`, the JSON carries the sample itself.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{de::DeserializeOwned, Serialize};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Topic of position fix messages
pub const TOPIC_GPS_FIX: &str = "gps_fix";

/// Topic of velocity messages
pub const TOPIC_GPS_VEL_NED: &str = "gps_vel_ned";

/// Topic of waypoint messages
pub const TOPIC_WAYPOINT: &str = "waypoint";

/// Topic of steering command messages
pub const TOPIC_CMD: &str = "cmd";

/// Topic of debug angle messages
pub const TOPIC_DEBUG_ANGLE: &str = "debug_angle";

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Possible errors when framing or unframing a message.
#[derive(Debug, thiserror::Error)]
pub enum MsgError {
    #[error("Message has no topic separator")]
    NoTopic,

    #[error("Expected topic \"{expected}\", found \"{found}\"")]
    WrongTopic {
        expected: String,
        found: String
    },

    #[error("Could not serialize the payload: {0}")]
    SerializationError(serde_json::Error),

    #[error("Message contains invalid JSON: {0}")]
    InvalidJson(serde_json::Error),
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Frame the given payload under the given topic.
pub fn pack<T: Serialize>(topic: &str, payload: &T) -> Result<String, MsgError> {
    let json = serde_json::to_string(payload)
        .map_err(MsgError::SerializationError)?;

    Ok(format!("{} {}", topic, json))
}

/// Split a message into its topic and parse the payload, checking the topic matches.
pub fn unpack<T: DeserializeOwned>(topic: &str, msg: &str) -> Result<T, MsgError> {
    let (found, json) = msg.split_once(' ').ok_or(MsgError::NoTopic)?;

    if found != topic {
        return Err(MsgError::WrongTopic {
            expected: topic.into(),
            found: found.into()
        })
    }

    serde_json::from_str(json).map_err(MsgError::InvalidJson)
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
