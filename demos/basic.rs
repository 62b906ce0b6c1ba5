use uri_parts::UriComponents;

fn main() {
    // Parse a URI into borrowed components
    let uri = UriComponents::parse("foo://user@example.com:8042/over/there?name=ferret#nose")
        .expect("Failed to parse URI");

    println!("URI: {uri}"); // foo://user@example.com:8042/over/there?name=ferret#nose
    println!("Scheme: {:?}", uri.scheme); // Some("foo")
    println!("User info: {:?}", uri.user_info); // Some("user")
    println!("Host: {:?}", uri.host); // Some("example.com")
    println!("Port: {:?}", uri.port_number()); // Some(8042)
    println!("Path: {:?}", uri.path); // Some("/over/there")
    println!("Query: {:?}", uri.query); // Some("name=ferret")
    println!("Fragment: {:?}", uri.fragment); // Some("nose")
}
