//! CoAP packet building and response matching.
//!
//! Pure functions over [`coap_lite::Packet`]; nothing here touches the network.

use coap_lite::{
    CoapOption, ContentFormat, MessageClass, MessageType, Packet, RequestType, ResponseType,
};

use crate::error::TradfriError;

/// Path of the device collection.
pub const DEVICES: &str = "15001";

/// A confirmable request for `path` (e.g. `"15001/65537"`).
///
/// The message id doubles as the token so responses can be matched either
/// way.
#[must_use]
pub fn request(method: RequestType, path: &str, payload: Option<Vec<u8>>, message_id: u16) -> Packet {
    let mut packet = Packet::new();
    packet.header.set_type(MessageType::Confirmable);
    packet.header.code = MessageClass::Request(method);
    packet.header.message_id = message_id;
    packet.set_token(message_id.to_be_bytes().to_vec());
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        packet.add_option(CoapOption::UriPath, segment.as_bytes().to_vec());
    }
    if let Some(payload) = payload {
        packet.set_content_format(ContentFormat::ApplicationJSON);
        packet.payload = payload;
    }
    packet
}

/// Empty acknowledgement for a confirmable message.
#[must_use]
pub fn empty_ack(message_id: u16) -> Packet {
    let mut packet = Packet::new();
    packet.header.set_type(MessageType::Acknowledgement);
    packet.header.code = MessageClass::Empty;
    packet.header.message_id = message_id;
    packet
}

/// Serialise a packet for the wire.
///
/// # Errors
///
/// Returns [`TradfriError::Packet`] if the packet cannot be encoded.
pub fn encode(packet: &Packet) -> Result<Vec<u8>, TradfriError> {
    packet
        .to_bytes()
        .map_err(|err| TradfriError::Packet(format!("{err:?}")))
}

/// Parse a datagram.
///
/// # Errors
///
/// Returns [`TradfriError::Packet`] if the bytes are not a CoAP message.
pub fn decode(bytes: &[u8]) -> Result<Packet, TradfriError> {
    Packet::from_bytes(bytes).map_err(|err| TradfriError::Packet(format!("{err:?}")))
}

/// How an incoming packet relates to an outstanding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Bare acknowledgement; the response follows separately.
    EmptyAck,
    /// The response, piggybacked or separate.
    Response,
    /// Something else; keep waiting.
    Unrelated,
}

/// Classify `incoming` against `request`.
#[must_use]
pub fn classify(request: &Packet, incoming: &Packet) -> Reply {
    let same_id = incoming.header.message_id == request.header.message_id;
    match &incoming.header.code {
        MessageClass::Empty
            if same_id && incoming.header.get_type() == MessageType::Acknowledgement =>
        {
            Reply::EmptyAck
        }
        MessageClass::Response(_) if incoming.get_token() == request.get_token() => {
            Reply::Response
        }
        _ => Reply::Unrelated,
    }
}

/// Whether a response must be acknowledged by the client.
#[must_use]
pub fn needs_ack(response: &Packet) -> bool {
    response.header.get_type() == MessageType::Confirmable
}

/// Payload of a successful (2.xx) response.
///
/// # Errors
///
/// Returns [`TradfriError::Status`] for any other response code.
pub fn success_payload(response: &Packet) -> Result<&[u8], TradfriError> {
    match &response.header.code {
        MessageClass::Response(
            ResponseType::Created
            | ResponseType::Deleted
            | ResponseType::Valid
            | ResponseType::Changed
            | ResponseType::Content,
        ) => Ok(&response.payload),
        other => Err(TradfriError::Status(format!("{other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(request: &Packet, kind: MessageType, code: ResponseType, payload: &[u8]) -> Packet {
        let mut packet = Packet::new();
        packet.header.set_type(kind);
        packet.header.code = MessageClass::Response(code);
        packet.header.message_id = request.header.message_id;
        packet.set_token(request.get_token().to_vec());
        packet.payload = payload.to_vec();
        packet
    }

    #[test]
    fn should_split_path_into_uri_path_options() {
        let packet = request(RequestType::Get, "/15001/65537", None, 7);

        let decoded = decode(&encode(&packet).unwrap()).unwrap();

        let segments: Vec<Vec<u8>> = decoded
            .get_option(CoapOption::UriPath)
            .unwrap()
            .iter()
            .cloned()
            .collect();
        assert_eq!(segments, vec![b"15001".to_vec(), b"65537".to_vec()]);
        assert_eq!(decoded.header.get_type(), MessageType::Confirmable);
        assert_eq!(decoded.header.code, MessageClass::Request(RequestType::Get));
        assert_eq!(decoded.header.message_id, 7);
    }

    #[test]
    fn should_carry_json_payload_on_put() {
        let body = br#"{"3312":[{"5850":1}]}"#.to_vec();
        let packet = request(RequestType::Put, "15001/65537", Some(body.clone()), 8);

        let decoded = decode(&encode(&packet).unwrap()).unwrap();

        assert_eq!(decoded.payload, body);
    }

    #[test]
    fn should_match_piggybacked_response_by_token() {
        let req = request(RequestType::Get, DEVICES, None, 11);
        let resp = response(&req, MessageType::Acknowledgement, ResponseType::Content, b"[]");

        assert_eq!(classify(&req, &resp), Reply::Response);
        assert!(!needs_ack(&resp));
        assert_eq!(success_payload(&resp).unwrap(), b"[]");
    }

    #[test]
    fn should_recognise_empty_ack_then_separate_response() {
        let req = request(RequestType::Get, DEVICES, None, 12);
        let ack = empty_ack(12);
        let mut separate = response(&req, MessageType::Confirmable, ResponseType::Content, b"[]");
        separate.header.message_id = 900;

        assert_eq!(classify(&req, &ack), Reply::EmptyAck);
        assert_eq!(classify(&req, &separate), Reply::Response);
        assert!(needs_ack(&separate));
    }

    #[test]
    fn should_ignore_response_for_other_token() {
        let req = request(RequestType::Get, DEVICES, None, 13);
        let other = request(RequestType::Get, DEVICES, None, 14);
        let resp = response(&other, MessageType::Acknowledgement, ResponseType::Content, b"");

        assert_eq!(classify(&req, &resp), Reply::Unrelated);
    }

    #[test]
    fn should_reject_error_response_code() {
        let req = request(RequestType::Get, "15001/1", None, 15);
        let resp = response(&req, MessageType::Acknowledgement, ResponseType::NotFound, b"");

        assert!(matches!(success_payload(&resp), Err(TradfriError::Status(_))));
    }
}
