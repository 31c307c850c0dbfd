// End-to-end tests for the voice clone backend API
//
// Each test gets its own server bound to an ephemeral port, wired with a
// recording stub in place of the ElevenLabs repository. The stub records
// every request it receives so tests can assert what reached the provider
// and, just as important, when nothing did.

mod test_health;
