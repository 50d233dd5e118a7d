/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Request dispatching with timeouts and status mapping
pub mod http;
/// Multipart bodies for datasource publishing
pub mod multipart;
/// Request payloads (`tsRequest` documents)
pub mod requests;
/// Response envelopes (`tsResponse` documents)
pub mod responses;
/// Wire-level tracing of requests and responses
pub mod trace;
/// XML encoding helpers
pub mod xml;
