mod canonical_wav_test;
