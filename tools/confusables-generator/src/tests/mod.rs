mod renderer_tests;

use std::{
	io::{Read, Write},
	net::TcpListener,
	thread,
};

pub const CYRILLIC_A_LINE: &str =
	"0430 ;\t0061 ;\tMA\t# ( а → a ) CYRILLIC SMALL LETTER A → LATIN SMALL LETTER A\t# ";

pub const LATIN_A_LINE: &str =
	"0041 ;\t0061 ;\tMA\t# ( A → a ) LATIN CAPITAL LETTER A → LATIN SMALL LETTER A";

pub const GREEK_ALPHA_LINE: &str =
	"0251 ;\t03B1 ;\tMA\t# ( ɑ → α ) LATIN SMALL LETTER ALPHA → GREEK SMALL LETTER ALPHA\t# ";

pub const DOCUMENT_HEADER: &str = "\u{feff}# confusables.txt\n\
	# Date: 2014-10-24, 19:05:00 GMT [MD]\n\
	#\n\
	# Unicode Security Mechanisms for UTS #39\n\
	\n";

/// Serves one HTTP response on a local port and returns the URI that reaches it.
pub fn serve_once(status: &str, body: &str) -> String {
	let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
	let addr = listener.local_addr().expect("test server address");
	let response = format!(
		"HTTP/1.1 {status}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
		body.len()
	);

	thread::spawn(move || {
		let Ok((mut stream, _)) = listener.accept() else { return };
		let mut request = Vec::new();
		let mut buf = [0u8; 512];
		while !request.windows(4).any(|window| window == b"\r\n\r\n") {
			match stream.read(&mut buf) {
				Ok(0) | Err(_) => break,
				Ok(n) => request.extend_from_slice(&buf[..n]),
			}
		}
		_ = stream.write_all(response.as_bytes());
	});

	format!("http://{addr}/Public/security/revision-06/confusables.txt")
}
