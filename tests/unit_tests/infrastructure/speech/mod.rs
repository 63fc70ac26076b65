mod google_tts_engine_test;
mod recognition_engine_factory_test;
mod whisper_server_engine_test;
