use hashbrown::HashMap;

use crate::{
    error::{GraphError, GraphResult},
    search::graph_algo::{Traversable, can_reach_with_stats},
    sets::visited::UncompressedSet,
    statistics::Stats,
};

/// Handle to an airport inside an [`AirportNetwork`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportId {
    internal: usize,
}

impl From<AirportId> for usize {
    fn from(id: AirportId) -> usize {
        id.internal
    }
}

#[derive(Debug)]
pub struct Airport {
    name: String,
    code: String,
    outbound: Vec<AirportId>,
}

impl Airport {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Direct outbound routes, in the order they were added.
    pub fn outbound_flights(&self) -> &[AirportId] {
        &self.outbound
    }
}

/// A directed flight network.
///
/// # Invariants
/// - `airports[i]` is the airport with id `i`.
/// - Airport codes are unique; `by_code` maps each code to its id.
/// - Every route points at a valid id.
#[derive(Debug, Default)]
pub struct AirportNetwork {
    airports: Vec<Airport>,
    by_code: HashMap<String, AirportId>,
}

impl AirportNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an airport with no outbound routes yet.
    ///
    /// Fails with [`GraphError::DuplicateCode`] if the code is already taken.
    pub fn add_airport(
        &mut self,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> GraphResult<AirportId> {
        let code = code.into();
        if self.by_code.contains_key(&code) {
            return Err(GraphError::DuplicateCode(code));
        }

        let id = AirportId {
            internal: self.airports.len(),
        };
        self.by_code.insert(code.clone(), id);
        self.airports.push(Airport {
            name: name.into(),
            code,
            outbound: Vec::new(),
        });
        Ok(id)
    }

    /// Adds a direct flight `from -> to`.
    ///
    /// # Panics
    /// If either id does not belong to this network.
    pub fn add_route(&mut self, from: AirportId, to: AirportId) {
        assert!(to.internal < self.airports.len(), "unknown airport {to:?}");
        self.airports[from.internal].outbound.push(to);
    }

    /// # Panics
    /// If `id` does not belong to this network.
    pub fn airport(&self, id: AirportId) -> &Airport {
        &self.airports[id.internal]
    }

    pub fn find(&self, code: &str) -> Option<AirportId> {
        self.by_code.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Whether `destination` can be reached from `start` through zero or more flights.
    ///
    /// Absent airports are never reachable and never reach anything.
    ///
    /// # Panics
    /// If `start` does not belong to this network.
    pub fn can_reach(&self, start: Option<AirportId>, destination: Option<AirportId>) -> bool {
        self.can_reach_with_stats(start, destination, &mut Stats::new())
    }

    pub fn can_reach_with_stats(
        &self,
        start: Option<AirportId>,
        destination: Option<AirportId>,
        stats: &mut Stats,
    ) -> bool {
        can_reach_with_stats(self, start.as_ref(), destination.as_ref(), stats)
    }

    /// [`can_reach`](Self::can_reach) with airports named by code. Unknown codes count as absent.
    pub fn can_reach_by_code(&self, start: &str, destination: &str) -> bool {
        self.can_reach(self.find(start), self.find(destination))
    }
}

impl Traversable for AirportNetwork {
    type Key = AirportId;
    type Visited = UncompressedSet;

    fn visitor_set(&self) -> UncompressedSet {
        UncompressedSet::new(self.airports.len())
    }

    fn neighbors(&self, key: &AirportId) -> &[AirportId] {
        &self.airports[key.internal].outbound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ten airports mirroring the integer test graph, without the self-loop:
    //   ATL -> JFK, SFO
    //   JFK -> ORD, DFW, SFO, DEN
    //   ORD -> JFK, DEN, MIA
    //   SFO -> SEA
    //   DEN -> MIA
    //   MIA -> SEA
    //   SEA -> DEN
    //   DFW -> LAS
    //   LAS -> (nothing)
    //   PHX -> SEA
    fn setup_network() -> AirportNetwork {
        let mut net = AirportNetwork::new();
        let codes = [
            ("Hartsfield-Jackson Atlanta International Airport", "ATL"),
            ("John F. Kennedy International Airport", "JFK"),
            ("O'Hare International Airport", "ORD"),
            ("San Francisco International Airport", "SFO"),
            ("Denver International Airport", "DEN"),
            ("Miami International Airport", "MIA"),
            ("Seattle-Tacoma International Airport", "SEA"),
            ("Dallas/Fort Worth International Airport", "DFW"),
            ("McCarran International Airport", "LAS"),
            ("Phoenix Sky Harbor International Airport", "PHX"),
        ];
        for (name, code) in codes {
            net.add_airport(name, code).unwrap();
        }

        let routes = [
            ("ATL", vec!["JFK", "SFO"]),
            ("JFK", vec!["ORD", "DFW", "SFO", "DEN"]),
            ("ORD", vec!["JFK", "DEN", "MIA"]),
            ("SFO", vec!["SEA"]),
            ("DEN", vec!["MIA"]),
            ("MIA", vec!["SEA"]),
            ("SEA", vec!["DEN"]),
            ("DFW", vec!["LAS"]),
            ("PHX", vec!["SEA"]),
        ];
        for (from, tos) in routes {
            let from = net.find(from).unwrap();
            for to in tos {
                let to = net.find(to).unwrap();
                net.add_route(from, to);
            }
        }
        net
    }

    #[test]
    fn test_accessors() {
        let net = setup_network();
        let jfk = net.find("JFK").unwrap();
        let airport = net.airport(jfk);
        assert_eq!(airport.code(), "JFK");
        assert_eq!(airport.name(), "John F. Kennedy International Airport");
        let codes: Vec<_> = airport
            .outbound_flights()
            .iter()
            .map(|&id| net.airport(id).code())
            .collect();
        assert_eq!(codes, vec!["ORD", "DFW", "SFO", "DEN"]);
        assert_eq!(net.len(), 10);
        assert!(net.find("CDG").is_none());
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut net = setup_network();
        let err = net.add_airport("Another Atlanta", "ATL").unwrap_err();
        assert!(matches!(err, GraphError::DuplicateCode(code) if code == "ATL"));
        assert_eq!(net.len(), 10);
    }

    #[test]
    fn test_can_reach_along_routes() {
        let net = setup_network();
        assert!(net.can_reach_by_code("ATL", "LAS"));
        assert!(net.can_reach_by_code("ATL", "MIA"));
        assert!(net.can_reach_by_code("PHX", "MIA"));
        assert!(net.can_reach_by_code("SEA", "MIA"));
    }

    #[test]
    fn test_cannot_reach_against_routes() {
        let net = setup_network();
        assert!(!net.can_reach_by_code("LAS", "ATL"));
        assert!(!net.can_reach_by_code("SEA", "JFK"));
        assert!(!net.can_reach_by_code("ATL", "PHX"));
        assert!(!net.can_reach_by_code("DEN", "SFO"));
    }

    #[test]
    fn test_can_reach_self_without_routes() {
        let net = setup_network();
        let las = net.find("LAS");
        assert!(net.airport(las.unwrap()).outbound_flights().is_empty());
        assert!(net.can_reach(las, las));
    }

    #[test]
    fn test_absent_airports_never_reach() {
        let net = setup_network();
        let atl = net.find("ATL");
        assert!(!net.can_reach(None, atl));
        assert!(!net.can_reach(atl, None));
        assert!(!net.can_reach(None, None));
        assert!(!net.can_reach_by_code("ATL", "CDG"));
        assert!(!net.can_reach_by_code("CDG", "CDG"));
    }

    #[test]
    fn test_cycle_does_not_loop_forever() {
        let net = setup_network();
        // DEN -> MIA -> SEA -> DEN is a cycle and never leads to ATL.
        assert!(!net.can_reach_by_code("DEN", "ATL"));
    }

    #[test]
    fn test_can_reach_stops_at_destination() {
        let net = setup_network();
        let mut stats = Stats::new();
        assert!(net.can_reach_with_stats(net.find("ATL"), net.find("LAS"), &mut stats));
        // ATL JFK ORD DEN MIA SEA DFW LAS, SFO is never expanded
        assert_eq!(stats.get_traversals(), 1);
        assert_eq!(stats.get_nodes_visited(), 8);
        assert_eq!(stats.get_edges_examined(), 13);
    }

    #[test]
    #[should_panic]
    fn test_foreign_airport_panics() {
        let net = setup_network();
        net.airport(AirportId { internal: 10 });
    }
}
