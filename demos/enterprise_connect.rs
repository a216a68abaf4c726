/// Join a (simulated) WPA2-Enterprise network and print the outcome.
///
/// The stack here is a scripted stand-in that reports an associated
/// state on the third status poll; swap in a `WifiStack` implementation
/// over a real vendor SDK to drive actual hardware.
use std::net::Ipv4Addr;
use std::sync::Mutex;

use async_trait::async_trait;
use eapsta::{EapCredentials, EnterpriseStation, StationStatus, WifiMode, WifiStack};

struct SimulatedStack {
    state: Mutex<Sim>,
}

struct Sim {
    associating: bool,
    polls: u32,
}

#[async_trait]
impl WifiStack for SimulatedStack {
    type Error = std::convert::Infallible;

    async fn disconnect(&mut self, _force: bool) -> Result<(), Self::Error> {
        let mut sim = self.state.lock().unwrap();
        sim.associating = false;
        sim.polls = 0;
        Ok(())
    }

    async fn set_mode(&mut self, _mode: WifiMode) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn set_enterprise_identity(&mut self, _identity: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn set_enterprise_username(&mut self, _username: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn set_enterprise_password(&mut self, _password: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn enable_enterprise_auth(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn disable_enterprise_auth(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn begin_association(&mut self, _ssid: &str) -> Result<(), Self::Error> {
        let mut sim = self.state.lock().unwrap();
        sim.associating = true;
        sim.polls = 0;
        Ok(())
    }

    async fn status(&self) -> StationStatus {
        let mut sim = self.state.lock().unwrap();
        if !sim.associating {
            return StationStatus::Disconnected;
        }
        sim.polls += 1;
        if sim.polls >= 3 {
            StationStatus::Connected
        } else {
            StationStatus::Disconnected
        }
    }

    async fn local_address(&self) -> Ipv4Addr {
        let sim = self.state.lock().unwrap();
        if sim.associating && sim.polls >= 3 {
            Ipv4Addr::new(10, 20, 0, 7)
        } else {
            Ipv4Addr::UNSPECIFIED
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let stack = SimulatedStack {
        state: Mutex::new(Sim {
            associating: false,
            polls: 0,
        }),
    };
    let mut station = EnterpriseStation::with_debug(stack, true);
    let creds = EapCredentials::new("alice@corp.example", "hunter2");

    println!("Connecting to enterprise Wi-Fi network...");
    match station.connect("CorpNet", &creds).await {
        Ok(()) => println!(
            "Connected, address {}",
            station.local_address().await
        ),
        Err(e) => println!("Connection failed: {e}"),
    }

    station.disconnect().await;
    println!("Status after disconnect: {}", station.status().await);
}
