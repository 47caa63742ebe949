use wavfile::WavFile;

fn main() {
    let path = std::env::args().nth(1).expect("usage: inspect_wav <file.wav>");

    let mut wav = WavFile::open(&path).unwrap();
    wav.read_all().unwrap();

    println!("{:#?}", wav.header().unwrap());
    println!("ready: {}", wav.is_ready());
    println!("samples: {}", wav.sample_count());

    let frames = wav.sample_count() as f64 / f64::from(wav.num_channels().max(1));
    let duration = std::time::Duration::from_secs_f64(frames / f64::from(wav.sample_rate().max(1)));
    println!("audio length: {:?}", duration);
}
