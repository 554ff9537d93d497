//! Directory template: listings with search.

/// Feature labels shown to the user, in display order.
pub const FEATURES: &[&str] = &["Listings", "Search"];

/// Template sources keyed by relative path.
pub const FILES: &[(&str, &str)] = &[
    ("App.js", APP_JS),
    ("screens/HomeScreen.js", HOME_SCREEN_JS),
    ("screens/ListingScreen.js", LISTING_SCREEN_JS),
    ("package.json", PACKAGE_JSON),
];

const APP_JS: &str = r#"import React from 'react';
import { NavigationContainer } from '@react-navigation/native';
import { createStackNavigator } from '@react-navigation/stack';
import HomeScreen from './screens/HomeScreen';
import ListingScreen from './screens/ListingScreen';

const Stack = createStackNavigator();

export default function App() {
  return (
    <NavigationContainer>
      <Stack.Navigator initialRouteName="Home">
        <Stack.Screen name="Home" component={HomeScreen} />
        <Stack.Screen name="Listing" component={ListingScreen} />
      </Stack.Navigator>
    </NavigationContainer>
  );
}"#;

const HOME_SCREEN_JS: &str = r#"import React from 'react';
import { SafeAreaView, View, Text, StyleSheet, TouchableOpacity } from 'react-native';
import { useNavigation } from '@react-navigation/native';

export default function HomeScreen() {
  const navigation = useNavigation();

  return (
    <SafeAreaView style={styles.container}>
      <View style={styles.hero}>
        <Text style={styles.title}>BUSINESS_NAME</Text>
        <Text style={styles.subtitle}>Find what you are looking for</Text>
      </View>
      <TouchableOpacity
        style={styles.browseButton}
        onPress={() => navigation.navigate('Listing')}
      >
        <Text style={styles.browseButtonText}>Browse Listings</Text>
      </TouchableOpacity>
    </SafeAreaView>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'THEME_BACKGROUND',
  },
  hero: {
    padding: 24,
    backgroundColor: 'THEME_PRIMARY',
    alignItems: 'center',
  },
  title: {
    fontSize: 28,
    fontWeight: 'bold',
    color: 'white',
  },
  subtitle: {
    fontSize: 16,
    color: 'white',
    marginTop: 8,
  },
  browseButton: {
    backgroundColor: 'THEME_SECONDARY',
    padding: 16,
    borderRadius: 8,
    margin: 20,
  },
  browseButtonText: {
    color: 'white',
    textAlign: 'center',
    fontSize: 16,
    fontWeight: '600',
  },
});"#;

const LISTING_SCREEN_JS: &str = r#"import React, { useState } from 'react';
import { View, Text, TextInput, FlatList, StyleSheet } from 'react-native';

const listings = [
  { id: 1, name: 'Downtown Bakery', category: 'Food' },
  { id: 2, name: 'Green Thumb Garden Center', category: 'Home' },
  { id: 3, name: 'Quick Fix Repairs', category: 'Services' },
  { id: 4, name: 'Sunny Day Care', category: 'Family' },
];

export default function ListingScreen() {
  const [query, setQuery] = useState('');

  const filtered = listings.filter(item =>
    item.name.toLowerCase().includes(query.toLowerCase())
  );

  const renderListing = ({ item }) => (
    <View style={styles.card}>
      <Text style={styles.cardTitle}>{item.name}</Text>
      <Text style={styles.cardCategory}>{item.category}</Text>
    </View>
  );

  return (
    <View style={styles.container}>
      <TextInput
        style={styles.search}
        placeholder="Search listings..."
        value={query}
        onChangeText={setQuery}
      />
      <FlatList
        data={filtered}
        renderItem={renderListing}
        keyExtractor={item => item.id.toString()}
      />
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'THEME_BACKGROUND',
    padding: 16,
  },
  search: {
    backgroundColor: 'white',
    padding: 12,
    borderRadius: 8,
    marginBottom: 16,
    borderWidth: 1,
    borderColor: 'THEME_PRIMARY',
  },
  card: {
    backgroundColor: 'white',
    padding: 16,
    marginBottom: 12,
    borderRadius: 8,
  },
  cardTitle: {
    fontSize: 18,
    fontWeight: '600',
    color: 'THEME_PRIMARY',
  },
  cardCategory: {
    fontSize: 14,
    color: 'THEME_SECONDARY',
    marginTop: 4,
  },
});"#;

const PACKAGE_JSON: &str = r#"{
  "name": "APP_IDENTIFIER",
  "version": "1.0.0",
  "main": "node_modules/expo/AppEntry.js",
  "scripts": {
    "start": "expo start",
    "android": "expo start --android",
    "ios": "expo start --ios",
    "web": "expo start --web"
  },
  "dependencies": {
    "expo": "~49.0.0",
    "react": "18.2.0",
    "react-native": "0.72.6",
    "@react-navigation/native": "^6.0.0",
    "@react-navigation/stack": "^6.0.0",
    "react-native-screens": "~3.22.0",
    "react-native-safe-area-context": "4.6.3"
  },
  "devDependencies": {
    "@babel/core": "^7.20.0"
  }
}"#;
