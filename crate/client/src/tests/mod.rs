mod recording_transport;
mod requests;
